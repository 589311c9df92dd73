//! Built-in stubs
//!
//! Handlebars templates rendered without HTML escaping. A backslash directly
//! before `{{` is a Handlebars escape, so fully qualified class names come in
//! pre-joined (`modelClass`, `requestClass`, ...).

/// Eloquent model
pub const MODEL: &str = r"<?php

namespace {{modelNamespace}};

use Illuminate\Database\Eloquent\Model;
{{softDeletesNamespace}}
/**
 * Class {{modelName}}
 *
{{properties}}
 *
 * @mixin \Illuminate\Database\Eloquent\Builder
 */
class {{modelName}} extends Model
{
    {{softDeletes}}
    protected $perPage = 20;

    /**
     * The attributes that are mass assignable.
     *
     * @var array<int, string>
     */
    protected $fillable = [{{fillable}}];
{{relations}}
}
";

/// Resource controller for the `bootstrap` and `tailwind` stacks
pub const CONTROLLER: &str = r"<?php

namespace {{controllerNamespace}};

use {{modelClass}};
use Illuminate\Http\RedirectResponse;
use Illuminate\Http\Request;
use {{requestClass}};
use Illuminate\Support\Facades\Redirect;
use Illuminate\View\View;

class {{modelName}}Controller extends Controller
{
    /**
     * Display a listing of the resource.
     */
    public function index(Request $request): View
    {
        ${{modelNamePluralLowerCase}} = {{modelName}}::paginate();

        return view('{{modelView}}.index', compact('{{modelNamePluralLowerCase}}'))
            ->with('i', ($request->input('page', 1) - 1) * ${{modelNamePluralLowerCase}}->perPage());
    }

    /**
     * Show the form for creating a new resource.
     */
    public function create(): View
    {
        ${{modelNameLowerCase}} = new {{modelName}}();

        return view('{{modelView}}.create', compact('{{modelNameLowerCase}}'));
    }

    /**
     * Store a newly created resource in storage.
     */
    public function store({{modelName}}Request $request): RedirectResponse
    {
        {{modelName}}::create($request->validated());

        return Redirect::route('{{modelRoute}}.index')
            ->with('success', '{{modelTitle}} created successfully.');
    }

    /**
     * Display the specified resource.
     */
    public function show($id): View
    {
        ${{modelNameLowerCase}} = {{modelName}}::find($id);

        return view('{{modelView}}.show', compact('{{modelNameLowerCase}}'));
    }

    /**
     * Show the form for editing the specified resource.
     */
    public function edit($id): View
    {
        ${{modelNameLowerCase}} = {{modelName}}::find($id);

        return view('{{modelView}}.edit', compact('{{modelNameLowerCase}}'));
    }

    /**
     * Update the specified resource in storage.
     */
    public function update({{modelName}}Request $request, {{modelName}} ${{modelNameLowerCase}}): RedirectResponse
    {
        ${{modelNameLowerCase}}->update($request->validated());

        return Redirect::route('{{modelRoute}}.index')
            ->with('success', '{{modelTitle}} updated successfully');
    }

    public function destroy($id): RedirectResponse
    {
        {{modelName}}::find($id)->delete();

        return Redirect::route('{{modelRoute}}.index')
            ->with('success', '{{modelTitle}} deleted successfully');
    }
}
";

/// JSON API controller for the `api` stack
pub const API_CONTROLLER: &str = r"<?php

namespace {{apiControllerNamespace}};

use {{modelClass}};
use Illuminate\Http\Request;
use {{requestClass}};
use Illuminate\Http\Response;
use App\Http\Controllers\Controller;
use {{resourceClass}};
use Illuminate\Http\Resources\Json\AnonymousResourceCollection;

class {{modelName}}Controller extends Controller
{
    /**
     * Display a listing of the resource.
     */
    public function index(Request $request)
    {
        ${{modelNamePluralLowerCase}} = {{modelName}}::paginate();

        return {{modelName}}Resource::collection(${{modelNamePluralLowerCase}});
    }

    /**
     * Store a newly created resource in storage.
     */
    public function store({{modelName}}Request $request): {{modelName}}
    {
        return {{modelName}}::create($request->validated());
    }

    /**
     * Display the specified resource.
     */
    public function show({{modelName}} ${{modelNameLowerCase}}): {{modelName}}
    {
        return ${{modelNameLowerCase}};
    }

    /**
     * Update the specified resource in storage.
     */
    public function update({{modelName}}Request $request, {{modelName}} ${{modelNameLowerCase}}): {{modelName}}
    {
        ${{modelNameLowerCase}}->update($request->validated());

        return ${{modelNameLowerCase}};
    }

    /**
     * Delete the specified resource.
     */
    public function destroy({{modelName}} ${{modelNameLowerCase}}): Response
    {
        ${{modelNameLowerCase}}->delete();

        return response()->noContent();
    }
}
";

/// Form request holding the validation rules
pub const REQUEST: &str = r"<?php

namespace {{requestNamespace}};

use Illuminate\Foundation\Http\FormRequest;

class {{modelName}}Request extends FormRequest
{
    /**
     * Determine if the user is authorized to make this request.
     */
    public function authorize(): bool
    {
        return true;
    }

    /**
     * Get the validation rules that apply to the request.
     *
     * @return array<string, \Illuminate\Contracts\Validation\ValidationRule|array|string>
     */
    public function rules(): array
    {
        return [{{rules}}
        ];
    }
}
";

/// JSON resource for the `api` stack
pub const RESOURCE: &str = r"<?php

namespace {{resourceNamespace}};

use Illuminate\Http\Request;
use Illuminate\Http\Resources\Json\JsonResource;

class {{modelName}}Resource extends JsonResource
{
    /**
     * Transform the resource into an array.
     *
     * @return array<string, mixed>
     */
    public function toArray(Request $request): array
    {
        return parent::toArray($request);
    }
}
";

/// Livewire form object for the `livewire` stack
pub const LIVEWIRE_FORM: &str = r"<?php

namespace {{livewireFormNamespace}};

use {{modelClass}};
use Livewire\Form;

class {{modelName}}Form extends Form
{
    public ?{{modelName}} ${{modelNameLowerCase}}Model;
    {{livewireFormProperties}}

    public function rules(): array
    {
        return [{{rules}}
        ];
    }

    public function setModel({{modelName}} ${{modelNameLowerCase}}Model): void
    {
        $this->{{modelNameLowerCase}}Model = ${{modelNameLowerCase}}Model;
        {{livewireFormSetValues}}
    }

    public function store(): void
    {
        $this->{{modelNameLowerCase}}Model->create($this->validate());

        $this->reset();
    }

    public function update(): void
    {
        $this->{{modelNameLowerCase}}Model->update($this->validate());

        $this->reset();
    }
}
";
